//! 常用简繁对照表
//!
//! 只收录一一对应的常用字；一简对多繁的字只出现在繁转简方向

use phf::phf_map;

/// 简体 → 繁体
pub static SIMPLIFIED_TO_TRADITIONAL: phf::Map<char, char> = phf_map! {
    '万' => '萬', '与' => '與', '专' => '專', '业' => '業', '东' => '東', '丝' => '絲',
    '两' => '兩', '严' => '嚴', '个' => '個', '丰' => '豐', '为' => '為', '丽' => '麗',
    '举' => '舉', '么' => '麼', '义' => '義', '乐' => '樂', '习' => '習', '乡' => '鄉',
    '书' => '書', '买' => '買', '乱' => '亂', '亏' => '虧', '亚' => '亞', '产' => '產',
    '亲' => '親', '从' => '從', '仓' => '倉', '仪' => '儀', '们' => '們', '价' => '價',
    '众' => '眾', '优' => '優', '会' => '會', '传' => '傳', '伤' => '傷', '体' => '體',
    '儿' => '兒', '党' => '黨', '兰' => '蘭', '关' => '關', '兴' => '興', '养' => '養',
    '兽' => '獸', '写' => '寫', '农' => '農', '冲' => '衝', '况' => '況', '准' => '準',
    '凉' => '涼', '几' => '幾', '击' => '擊', '刘' => '劉', '剧' => '劇', '劝' => '勸',
    '务' => '務', '动' => '動', '势' => '勢', '区' => '區', '医' => '醫', '华' => '華',
    '单' => '單', '卖' => '賣', '卫' => '衛', '厅' => '廳', '历' => '歷', '压' => '壓',
    '参' => '參', '双' => '雙', '发' => '發', '变' => '變', '叶' => '葉', '号' => '號',
    '叹' => '嘆', '后' => '後', '吓' => '嚇', '吗' => '嗎', '吨' => '噸', '听' => '聽',
    '员' => '員', '响' => '響', '团' => '團', '园' => '園', '国' => '國', '图' => '圖',
    '坏' => '壞', '块' => '塊', '坚' => '堅', '坟' => '墳', '壮' => '壯', '声' => '聲',
    '壳' => '殼', '处' => '處', '备' => '備', '复' => '復', '头' => '頭', '夺' => '奪',
    '奖' => '獎', '妇' => '婦', '孙' => '孫', '学' => '學', '宁' => '寧', '宝' => '寶',
    '实' => '實', '宾' => '賓', '对' => '對', '寻' => '尋', '导' => '導', '寿' => '壽',
    '将' => '將', '尔' => '爾', '尝' => '嘗', '尽' => '盡', '属' => '屬', '岁' => '歲',
    '岛' => '島', '巩' => '鞏', '帅' => '帥', '师' => '師', '带' => '帶', '广' => '廣',
    '庄' => '莊', '庆' => '慶', '应' => '應', '开' => '開', '强' => '強', '归' => '歸',
    '当' => '當', '录' => '錄', '忆' => '憶', '忧' => '憂', '怀' => '懷', '态' => '態',
    '总' => '總', '惊' => '驚', '惩' => '懲', '愿' => '願', '戏' => '戲', '战' => '戰',
    '拥' => '擁', '换' => '換', '敌' => '敵', '无' => '無', '旧' => '舊', '时' => '時',
    '昼' => '晝', '显' => '顯', '晓' => '曉', '机' => '機', '杀' => '殺', '杂' => '雜',
    '权' => '權', '条' => '條', '来' => '來', '极' => '極', '构' => '構', '树' => '樹',
    '样' => '樣', '桥' => '橋', '梦' => '夢', '楼' => '樓', '欢' => '歡', '气' => '氣',
    '汇' => '匯', '汉' => '漢', '汤' => '湯', '沟' => '溝', '济' => '濟', '温' => '溫',
    '湾' => '灣', '灭' => '滅', '灯' => '燈', '灵' => '靈', '灾' => '災', '点' => '點',
    '热' => '熱', '爱' => '愛', '爷' => '爺', '猪' => '豬', '环' => '環', '现' => '現',
    '电' => '電', '画' => '畫', '疗' => '療', '疮' => '瘡', '盐' => '鹽', '盖' => '蓋',
    '盘' => '盤', '确' => '確', '礼' => '禮', '离' => '離', '积' => '積', '称' => '稱',
    '穷' => '窮', '笔' => '筆', '简' => '簡', '类' => '類', '红' => '紅', '约' => '約',
    '级' => '級', '纸' => '紙', '线' => '線', '练' => '練', '组' => '組', '经' => '經',
    '结' => '結', '给' => '給', '继' => '繼', '绿' => '綠', '网' => '網', '罗' => '羅',
    '罢' => '罷', '职' => '職', '脑' => '腦', '艺' => '藝', '节' => '節', '荣' => '榮',
    '获' => '獲', '营' => '營', '蓝' => '藍', '虫' => '蟲', '虾' => '蝦', '补' => '補',
    '装' => '裝', '见' => '見', '观' => '觀', '视' => '視', '觉' => '覺', '誉' => '譽',
    '认' => '認', '让' => '讓', '议' => '議', '讲' => '講', '论' => '論', '证' => '證',
    '识' => '識', '词' => '詞', '话' => '話', '语' => '語', '说' => '說', '请' => '請',
    '读' => '讀', '课' => '課', '谈' => '談', '谢' => '謝', '贝' => '貝', '质' => '質',
    '购' => '購', '贵' => '貴', '赛' => '賽', '赶' => '趕', '跃' => '躍', '车' => '車',
    '转' => '轉', '软' => '軟', '轻' => '輕', '辆' => '輛', '边' => '邊', '达' => '達',
    '迁' => '遷', '过' => '過', '运' => '運', '还' => '還', '这' => '這', '进' => '進',
    '远' => '遠', '迟' => '遲', '适' => '適', '选' => '選', '递' => '遞', '邓' => '鄧',
    '邮' => '郵', '针' => '針', '钟' => '鐘', '钢' => '鋼', '钱' => '錢', '钻' => '鑽',
    '铁' => '鐵', '铅' => '鉛', '银' => '銀', '锁' => '鎖', '错' => '錯', '键' => '鍵',
    '长' => '長', '门' => '門', '问' => '問', '间' => '間', '队' => '隊', '阳' => '陽',
    '阴' => '陰', '阵' => '陣', '际' => '際', '陆' => '陸', '陈' => '陳', '难' => '難',
    '静' => '靜', '页' => '頁', '项' => '項', '顾' => '顧', '频' => '頻', '题' => '題',
    '风' => '風', '飞' => '飛', '饭' => '飯', '饮' => '飲', '饱' => '飽', '饿' => '餓',
    '馆' => '館', '马' => '馬', '驴' => '驢', '鱼' => '魚', '鸟' => '鳥', '鸡' => '雞',
    '鸣' => '鳴', '麦' => '麥', '黄' => '黃', '齐' => '齊', '齿' => '齒', '龙' => '龍',
    '龟' => '龜',
};

/// 繁体 → 简体
pub static TRADITIONAL_TO_SIMPLIFIED: phf::Map<char, char> = phf_map! {
    '亂' => '乱', '亞' => '亚', '來' => '来', '係' => '系', '倉' => '仓', '個' => '个',
    '們' => '们', '備' => '备', '傳' => '传', '傷' => '伤', '價' => '价', '儀' => '仪',
    '優' => '优', '兒' => '儿', '兩' => '两', '劇' => '剧', '劉' => '刘', '動' => '动',
    '務' => '务', '勢' => '势', '勸' => '劝', '匯' => '汇', '區' => '区', '參' => '参',
    '員' => '员', '問' => '问', '單' => '单', '嗎' => '吗', '嘆' => '叹', '嘗' => '尝',
    '噸' => '吨', '嚇' => '吓', '嚴' => '严', '國' => '国', '園' => '园', '圖' => '图',
    '團' => '团', '堅' => '坚', '塊' => '块', '墳' => '坟', '壓' => '压', '壞' => '坏',
    '壯' => '壮', '壽' => '寿', '夢' => '梦', '夥' => '伙', '奪' => '夺', '婦' => '妇',
    '孫' => '孙', '學' => '学', '實' => '实', '寧' => '宁', '寫' => '写', '寶' => '宝',
    '將' => '将', '專' => '专', '尋' => '寻', '對' => '对', '導' => '导', '屬' => '属',
    '島' => '岛', '帥' => '帅', '師' => '师', '帶' => '带', '幹' => '干', '幾' => '几',
    '廣' => '广', '廳' => '厅', '強' => '强', '彙' => '汇', '後' => '后', '從' => '从',
    '復' => '复', '愛' => '爱', '態' => '态', '慶' => '庆', '憂' => '忧', '憶' => '忆',
    '應' => '应', '懲' => '惩', '懷' => '怀', '戰' => '战', '戲' => '戏', '換' => '换',
    '擁' => '拥', '擊' => '击', '敵' => '敌', '時' => '时', '晝' => '昼', '曆' => '历',
    '曉' => '晓', '書' => '书', '會' => '会', '東' => '东', '條' => '条', '業' => '业',
    '極' => '极', '榮' => '荣', '構' => '构', '樂' => '乐', '樓' => '楼', '樣' => '样',
    '樹' => '树', '橋' => '桥', '機' => '机', '檯' => '台', '權' => '权', '歡' => '欢',
    '歲' => '岁', '歷' => '历', '歸' => '归', '殺' => '杀', '殼' => '壳', '氣' => '气',
    '況' => '况', '涼' => '凉', '湯' => '汤', '準' => '准', '溝' => '沟', '溫' => '温',
    '滅' => '灭', '漢' => '汉', '濟' => '济', '灣' => '湾', '災' => '灾', '為' => '为',
    '無' => '无', '熱' => '热', '燈' => '灯', '營' => '营', '爺' => '爷', '爾' => '尔',
    '獎' => '奖', '獲' => '获', '獸' => '兽', '現' => '现', '環' => '环', '產' => '产',
    '畫' => '画', '當' => '当', '瘡' => '疮', '療' => '疗', '發' => '发', '盡' => '尽',
    '盤' => '盘', '眾' => '众', '確' => '确', '禮' => '礼', '稱' => '称', '穀' => '谷',
    '積' => '积', '窮' => '穷', '筆' => '笔', '節' => '节', '簡' => '简', '約' => '约',
    '紅' => '红', '紙' => '纸', '級' => '级', '組' => '组', '結' => '结', '給' => '给',
    '絲' => '丝', '經' => '经', '綠' => '绿', '網' => '网', '線' => '线', '練' => '练',
    '總' => '总', '繼' => '继', '纔' => '才', '罷' => '罢', '羅' => '罗', '義' => '义',
    '習' => '习', '聲' => '声', '職' => '职', '聽' => '听', '腦' => '脑', '臺' => '台',
    '與' => '与', '興' => '兴', '舉' => '举', '舊' => '旧', '莊' => '庄', '華' => '华',
    '萬' => '万', '葉' => '叶', '蓋' => '盖', '藍' => '蓝', '藝' => '艺', '蘭' => '兰',
    '處' => '处', '號' => '号', '虧' => '亏', '蝦' => '虾', '蟲' => '虫', '衆' => '众',
    '衛' => '卫', '衝' => '冲', '裏' => '里', '補' => '补', '裝' => '装', '裡' => '里',
    '複' => '复', '見' => '见', '視' => '视', '親' => '亲', '覺' => '觉', '觀' => '观',
    '詞' => '词', '話' => '话', '認' => '认', '語' => '语', '說' => '说', '課' => '课',
    '談' => '谈', '請' => '请', '論' => '论', '講' => '讲', '謝' => '谢', '證' => '证',
    '識' => '识', '議' => '议', '譽' => '誉', '讀' => '读', '變' => '变', '讓' => '让',
    '豐' => '丰', '豬' => '猪', '貝' => '贝', '貴' => '贵', '買' => '买', '賓' => '宾',
    '賣' => '卖', '質' => '质', '購' => '购', '賽' => '赛', '趕' => '赶', '躍' => '跃',
    '車' => '车', '軟' => '软', '輕' => '轻', '輛' => '辆', '轉' => '转', '農' => '农',
    '這' => '这', '進' => '进', '運' => '运', '過' => '过', '達' => '达', '遞' => '递',
    '遠' => '远', '適' => '适', '遲' => '迟', '遷' => '迁', '選' => '选', '還' => '还',
    '邊' => '边', '郵' => '邮', '鄉' => '乡', '鄧' => '邓', '醜' => '丑', '醫' => '医',
    '針' => '针', '鉛' => '铅', '銀' => '银', '鋼' => '钢', '錄' => '录', '錢' => '钱',
    '錯' => '错', '鍵' => '键', '鍾' => '钟', '鎖' => '锁', '鐘' => '钟', '鐵' => '铁',
    '鑽' => '钻', '長' => '长', '門' => '门', '開' => '开', '間' => '间', '關' => '关',
    '陣' => '阵', '陰' => '阴', '陳' => '陈', '陸' => '陆', '陽' => '阳', '隊' => '队',
    '際' => '际', '雙' => '双', '雜' => '杂', '雞' => '鸡', '離' => '离', '難' => '难',
    '電' => '电', '靈' => '灵', '靜' => '静', '鞏' => '巩', '響' => '响', '頁' => '页',
    '項' => '项', '頭' => '头', '頻' => '频', '題' => '题', '願' => '愿', '類' => '类',
    '顧' => '顾', '顯' => '显', '風' => '风', '颱' => '台', '飛' => '飞', '飯' => '饭',
    '飲' => '饮', '飽' => '饱', '養' => '养', '餓' => '饿', '館' => '馆', '馬' => '马',
    '驚' => '惊', '驢' => '驴', '體' => '体', '髮' => '发', '鬥' => '斗', '魚' => '鱼',
    '鳥' => '鸟', '鳴' => '鸣', '鹽' => '盐', '麗' => '丽', '麥' => '麦', '麵' => '面',
    '麼' => '么', '黃' => '黄', '點' => '点', '黨' => '党', '齊' => '齐', '齒' => '齿',
    '龍' => '龙', '龜' => '龟',
};
